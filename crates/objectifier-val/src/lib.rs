mod string;
pub use string::*;

mod key;
pub use key::*;

mod array;
pub use array::*;

mod obj;
pub use obj::*;

mod value;
pub use value::*;

mod json;
