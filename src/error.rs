/// Errors raised while setting up or driving an SDL window.
#[derive(Debug)]
pub enum AppError {
    Sdl(sdl3::Error), // SDL subsystem error.
    Window(String),   // Window creation failed.
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Sdl(why) => write!(f, "SDL Error: {why}"),
            AppError::Window(why) => write!(f, "Window Error: {why}"),
        }
    }
}

impl std::error::Error for AppError {}
