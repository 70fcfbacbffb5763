/*!
Struct/methods to save/recall arithmetic settings.

A settings file is a small TOML document:

```toml
epsilon = 0.0001
division = "strict"
```

Missing keys take their default values.
*/

use std::fs::{read_to_string, File};
use std::io::Write;
use std::path::Path;

use ::log::debug;
use ::serde_derive::{Deserialize, Serialize};

use crate::cx::Cx;
use crate::err::{Error, Result};

/**
How `Settings::divide()` treats a divisor of zero magnitude.

`Permissive` lets the NaN/infinite components through, exactly like `/`;
`Strict` reports `Error::DivisionByZero`.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionMode {
    #[default]
    Permissive,
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub epsilon: f64,
    pub division: DivisionMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            epsilon: 0.0001,
            division: DivisionMode::Permissive,
        }
    }
}

impl Settings {
    /**
    Check that `epsilon` is finite and non-negative. Anything else would
    make `converged()` false for every pair of values, identical or not.
    */
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }

    pub fn divide(&self, dividend: Cx, divisor: Cx) -> Result<Cx> {
        match self.division {
            DivisionMode::Permissive => Ok(dividend / divisor),
            DivisionMode::Strict => dividend.checked_div(divisor),
        }
    }

    /** True if `a` and `b` agree per component to within `epsilon`. */
    pub fn converged(&self, a: Cx, b: Cx) -> bool {
        a.approx_eq(&b, self.epsilon)
    }
}

pub fn to_toml_string(settings: &Settings) -> Result<String> {
    settings.validate()?;
    Ok(toml::to_string(settings)?)
}

pub fn from_toml_str(s: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(s)?;
    settings.validate()?;
    Ok(settings)
}

pub fn save<P: AsRef<Path>>(settings: &Settings, fname: P) -> Result<()> {
    let fname = fname.as_ref();
    let toml_string = to_toml_string(settings)?;

    let io_err = |source| Error::Io { path: fname.to_path_buf(), source };
    let mut f = File::create(fname).map_err(io_err)?;
    f.write_all(toml_string.as_bytes()).map_err(io_err)?;
    f.flush().map_err(io_err)?;

    debug!("saved settings to {}: {:?}", fname.display(), settings);
    Ok(())
}

pub fn load<P: AsRef<Path>>(fname: P) -> Result<Settings> {
    let fname = fname.as_ref();
    let toml_string = read_to_string(fname).map_err(|source| Error::Io {
        path: fname.to_path_buf(),
        source,
    })?;

    let settings: Settings = toml::from_str(&toml_string).map_err(|source| {
        Error::ParseToml { path: fname.to_path_buf(), source }
    })?;
    settings.validate()?;

    debug!("loaded settings from {}: {:?}", fname.display(), &settings);
    Ok(settings)
}
