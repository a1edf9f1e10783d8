mod instance;
mod part;
mod placed_part;
mod sheet;
mod solution;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placed_part::PlacedPart;
#[doc(inline)]
pub use placed_part::SheetLayout;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use solution::PackSolution;
