/// Version information for the frontend application
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn name() -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    /// Returns the full version string with name
    pub fn full() -> String {
        format!("{} v{}", Self::name(), Self::current())
    }

    pub fn short() -> String {
        format!("v{}", Self::current())
    }
}
