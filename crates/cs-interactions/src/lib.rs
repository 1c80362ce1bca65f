pub mod contact;
pub mod effects;
pub mod hero;
pub mod throttle;

pub use contact::{ContactFields, ContactValidation, FieldError};
pub use effects::{
    CardTilt, RIPPLE_KEYFRAMES, Rect, RippleGeometry, card_tilt, is_mobile, parallax_offset,
    parallax_transform, ripple_geometry,
};
pub use hero::{HERO_ENTRY_TRANSITION, HeroEntryFrame, parse_delay};
pub use throttle::Throttle;
