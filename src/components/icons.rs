//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap Icons. Swap the imports here to
//! restyle every install hint at once.

use icondata::Icon;

pub const SHARE: Icon = icondata::BsBoxArrowUp;
pub const ADD_TO_HOME: Icon = icondata::BsPlusSquare;
pub const SAFARI: Icon = icondata::BsCompass;
pub const INSTALL: Icon = icondata::BsDownload;
