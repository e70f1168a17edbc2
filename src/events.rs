pub enum Event {
    /// Stop the simulation and leave
    Exit,
}

/// Why the driver loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured generation bound was reached
    MaxGenerations,

    /// The user asked to leave
    Exit,
}
