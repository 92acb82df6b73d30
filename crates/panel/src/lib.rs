//! # shutterhub-panel
//!
//! Client-side logic of the control panel, as a library.
//!
//! The panel page itself is a dumb HTML form plus calibration buttons;
//! the two behaviors behind it live here so they can be driven and tested
//! without a browser:
//!
//! - [`form`]: derive the form's submission target from the checkbox
//!   selection and the scale slider (the **command builder**);
//! - [`calibrate`]: fire one JSON POST per calibration button press and
//!   reflect success on the button's status indicator (the **calibration
//!   trigger**).
//!
//! The page's document is abstracted behind two small capabilities —
//! [`form::CommandForm`] and [`calibrate::StatusIndicator`] — so embedders
//! decide what "the form" and "an indicator element" are.

pub mod calibrate;
pub mod form;

pub use calibrate::{CalibrationClient, StatusIndicator};
pub use form::{CommandForm, Selection, apply_command_target, command_target};
