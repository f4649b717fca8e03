// Resource bindings
//
// One `impl Client` block per API resource family. Each method binds a
// fixed path template to one of the four request primitives and adds no
// logic of its own.

pub mod accounts;
pub mod autoresponders;
pub mod campaigns;
pub mod contacts;
pub mod custom_fields;
pub mod ecommerce;
pub mod forms;
pub mod from_fields;
pub mod imports;
pub mod multimedia;
pub mod newsletters;
pub mod pipelines;
pub mod rss_newsletters;
pub mod saved_searches;
pub mod subscription_confirmations;
pub mod suppressions;
pub mod tags;
pub mod webinars;
pub mod workflows;
