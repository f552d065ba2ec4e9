//! Build regular expressions from chained, human-readable method calls.
//!
//! # Example
//!
//! ```rust
//! use human_regex::HumanRegex;
//!
//! let mut re = HumanRegex::new();
//! re.start_of_string()
//!     .not(|r| r.find("foo"))
//!     .anything()
//!     .then("-")
//!     .digits().exactly(4)
//!     .then(".mov")
//!     .end_of_string();
//!
//! assert!(re.matches("bar-2016.mov").unwrap());
//! assert!(!re.matches("foo-2016.mov").unwrap());
//!
//! // Alternations close themselves.
//! let mut ext = HumanRegex::new();
//! ext.global().letters().any_of([".jpg", ".png"]);
//! assert_eq!(ext.render(), r"(?m)(?:[a-zA-Z])+(?:(?:\.jpg)|(?:\.png))");
//! assert_eq!(ext.find_matches("a.jpg b.png").unwrap(), vec!["a.jpg", "b.png"]);
//! ```

mod builder;
pub mod char_class;
mod error;
mod match_mode;
mod matcher;
mod sequence;
pub mod token;
mod value;

pub use builder::HumanRegex;
pub use char_class::ClassMember;
pub use error::{Error, Result};
pub use match_mode::MatchMode;
pub use token::{Repetition, Token, TokenKind};
pub use value::{Generator, Value};
