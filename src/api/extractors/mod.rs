mod bound_form;
mod validated_json;

pub use bound_form::BoundForm;
pub use validated_json::ValidatedJson;
