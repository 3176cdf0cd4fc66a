/// A discrete player command fed to [`Engine::apply`](crate::Engine::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
    Quit,
}
