//! The boundary surface towards the excluded GUI/storage layers: serializable
//! representations of the input and the ranked output, plus the conversions
//! from and to the internal entities.

pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
