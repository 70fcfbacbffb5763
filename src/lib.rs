/*!
An immutable complex number type, with the arithmetic needed to evaluate
polynomials and their derivatives for Newton's-method fractals.

```
use newton_cx::cx::Cx;

let z = Cx::rect(1.0, 0.0) / Cx::rect(1.0, 1.0);
assert!(z.approx_eq(&Cx::rect(0.5, -0.5), 1.0e-4));
assert_eq!(Cx::ZERO.to_string(), "(0.0, 0.0)");
```
*/

pub mod cx;
pub mod err;
pub mod field;
pub mod rw;

pub use cx::{Cx, CxKey};
pub use err::{Error, Result};
