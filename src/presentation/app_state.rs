// Application state for HTTP handlers
use crate::application::shell::Shell;

pub struct AppState {
    pub shell: Shell,
}
