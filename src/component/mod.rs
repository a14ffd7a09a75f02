pub mod proxy;
pub mod registry;

pub use proxy::ComponentProxy;
pub use registry::{ComponentDescriptor, ComponentFn, ComponentRegistry};
