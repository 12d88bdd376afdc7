pub mod device;
pub mod page;

pub use device::DeviceProfile;
pub use page::{LoadedPage, PageSignals, Tally};
