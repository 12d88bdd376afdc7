use serde::Serialize;

/// Viewport and emulation settings for one device class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceProfile {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: f64,
    pub is_mobile: bool,
    pub has_touch: bool,
    pub user_agent: &'static str,
}

pub const DESKTOP: DeviceProfile = DeviceProfile {
    name: "desktop",
    width: 1920,
    height: 1080,
    device_scale_factor: 1.0,
    is_mobile: false,
    has_touch: false,
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
};

// Samsung Galaxy Tab S8
pub const TABLET: DeviceProfile = DeviceProfile {
    name: "tablet",
    width: 800,
    height: 1280,
    device_scale_factor: 2.0,
    is_mobile: true,
    has_touch: true,
    user_agent: "Mozilla/5.0 (Linux; Android 12; SM-X906B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
};

// Samsung Galaxy S23
pub const MOBILE: DeviceProfile = DeviceProfile {
    name: "mobile",
    width: 360,
    height: 780,
    device_scale_factor: 3.0,
    is_mobile: true,
    has_touch: true,
    user_agent: "Mozilla/5.0 (Linux; Android 13; SM-S911B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36",
};

impl DeviceProfile {
    /// Looks up a profile by name; anything unrecognised gets the desktop profile.
    pub fn for_device(name: &str) -> &'static DeviceProfile {
        match name.trim().to_ascii_lowercase().as_str() {
            "mobile" => &MOBILE,
            "tablet" => &TABLET,
            _ => &DESKTOP,
        }
    }
}
