use crate::entities::{Instance, Part, Sheet};
use crate::error::OptError;
use crate::io::ext_repr::ExtInstance;

/// Builds a validated [`Instance`] from its external representation.
/// Part ids are assigned by position in the submitted list.
pub fn import(ext: &ExtInstance) -> Result<Instance, OptError> {
    let parts = ext
        .parts
        .iter()
        .enumerate()
        .map(|(id, ep)| Part::new(id, ep.name.clone(), ep.width, ep.height))
        .collect();
    let sheet = Sheet::new(ext.sheet.width, ext.sheet.height);
    Instance::new(parts, sheet)
}
