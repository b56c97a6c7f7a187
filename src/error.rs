// Copyright (c) 2024-2025  ll97calc developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Error handling
==============

Error type for the analysis library.
*/

use std::fmt;

/// Errors raised while preparing or running a compliance analysis
#[derive(Debug)]
pub enum Ll97Error {
    /// A value could not be parsed from its string representation
    ParseError(String),
    /// An input value is outside its accepted domain
    WrongInput(String),
    /// A selected retrofit id is not present in the measure catalog.
    ///
    /// Selections should only ever be built from catalog ids, so this is a
    /// caller bug, not a recoverable user input problem.
    UnknownRetrofit(String),
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Ll97Error>;

impl fmt::Display for Ll97Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ll97Error::ParseError(v) => write!(f, "Could not parse value from \"{}\"", v),
            Ll97Error::WrongInput(v) => write!(f, "Invalid input: {}", v),
            Ll97Error::UnknownRetrofit(id) => write!(f, "Retrofit measure not found: {}", id),
        }
    }
}

impl std::error::Error for Ll97Error {}

impl From<std::num::ParseFloatError> for Ll97Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Ll97Error::ParseError(err.to_string())
    }
}
