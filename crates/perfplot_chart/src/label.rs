//! Legend label formats.

/// How a dataset's legend label is formed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelStyle {
    /// The toolchain name alone (one chart per device).
    Toolchain,
    /// `"{device}-{toolchain}"` (devices share a chart).
    DeviceToolchain,
}

impl LabelStyle {
    /// Formats the label for a toolchain's dataset on a device.
    pub fn format(self, device: &str, toolchain: &str) -> String {
        match self {
            LabelStyle::Toolchain => toolchain.to_string(),
            LabelStyle::DeviceToolchain => format!("{device}-{toolchain}"),
        }
    }
}
