pub mod department;
pub mod polling;
pub mod preference;
pub mod seed;

pub use department::DepartmentService;
pub use polling::PollingCache;
pub use preference::PreferenceService;
