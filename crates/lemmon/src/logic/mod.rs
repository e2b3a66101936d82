//! Formulas, assignments and structural operations over them

pub mod assignment;
pub mod compare;
pub mod expr;
pub mod printer;
pub mod subexpr;

pub use assignment::Assignment;
pub use compare::{compare, equivalent};
pub use expr::Expression;
pub use printer::{canonical, format_spacing};
pub use subexpr::subexpressions;
