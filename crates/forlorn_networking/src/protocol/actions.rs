//! # Player Actions
//!
//! Outgoing bot commands. Unlike the feed they are text: one JSON object
//! behind the [`MessageType::PlayerAction`] type byte.
//!
//! ```text
//! 0x03 {"dest":{"x":..,"y":..},"save":"<base64>","switch":1,"shoot":{..},"rotate_blade":1.57}
//! ```
//!
//! Every key is optional. The server applies whatever is present.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use forlorn_shared::{Point, SAVE_SIZE};
use serde::Serialize;

use super::entities::Weapon;
use super::message::MessageType;
use crate::error::EncodeResult;

/// One command for the server.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Walk towards a point.
    MoveTo(Point),
    /// Fire the canon at a point.
    ShootAt(Point),
    /// Equip another weapon.
    SwitchWeapon(Weapon),
    /// Set the blade rotation, in radians.
    RotateBlade(f64),
    /// Replace the private save blob. Only the first
    /// [`SAVE_SIZE`] bytes are kept.
    Store(Vec<u8>),
}

/// Wire shape of the merged action object.
#[derive(Debug, Default, Serialize)]
struct ActionFrame {
    #[serde(skip_serializing_if = "Option::is_none")]
    dest: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    save: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    switch: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shoot: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotate_blade: Option<f64>,
}

impl ActionFrame {
    fn merge(actions: &[Action]) -> Self {
        let mut frame = Self::default();
        for action in actions {
            match action {
                Action::MoveTo(dest) => frame.dest = Some(*dest),
                Action::ShootAt(target) => frame.shoot = Some(*target),
                Action::SwitchWeapon(weapon) => frame.switch = Some(*weapon as u8),
                Action::RotateBlade(rad) => frame.rotate_blade = Some(*rad),
                Action::Store(data) => {
                    let kept = &data[..data.len().min(SAVE_SIZE)];
                    frame.save = Some(STANDARD.encode(kept));
                }
            }
        }
        frame
    }
}

/// Encodes `actions` as one action frame.
///
/// Later actions of the same kind replace earlier ones.
pub fn encode_actions(actions: &[Action]) -> EncodeResult<Vec<u8>> {
    let frame = ActionFrame::merge(actions);
    let mut out = vec![MessageType::PlayerAction as u8];
    serde_json::to_writer(&mut out, &frame)?;
    Ok(out)
}
