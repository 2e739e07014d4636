pub mod app;
pub mod dir;
pub mod logger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn gui_version() {
        // The GUI is released along with the engine it drives.
        assert_eq!(super::VERSION, signup::VERSION);
    }
}
