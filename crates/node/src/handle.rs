//! Resize handles.
//!
//! A selected shape carries eight handles: four corners and four edge
//! midpoints. A handle holds no geometry logic. It records where the pointer
//! went down and which phase of a drag it is in; the shape interprets the drag.

use crate::coords::{CanvasSize, LocalPoint};
use crate::ShapeId;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Side length of a handle square.
pub const HANDLE_SIZE: f32 = 8.0;

/// Which corner or edge a handle controls.
///
/// Discriminants are the handle indices: 0-3 are corners clockwise from the
/// top-left, 4-7 are edge midpoints clockwise from the top.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
    Top = 4,
    Right = 5,
    Bottom = 6,
    Left = 7,
}

impl ResizeHandle {
    /// All handles in index order.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::Top,
        ResizeHandle::Right,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_corner(self) -> bool {
        self.index() < 4
    }

    /// Position of this handle's top-left corner, local to a shape of `size`.
    ///
    /// Handles are centered on the corner or edge midpoint they control.
    pub fn position(self, size: CanvasSize) -> LocalPoint {
        let half = HANDLE_SIZE / 2.0;
        let (w, h) = (size.width(), size.height());
        match self {
            ResizeHandle::TopLeft => LocalPoint::new(-half, -half),
            ResizeHandle::TopRight => LocalPoint::new(w - half, -half),
            ResizeHandle::BottomRight => LocalPoint::new(w - half, h - half),
            ResizeHandle::BottomLeft => LocalPoint::new(-half, h - half),
            ResizeHandle::Top => LocalPoint::new(w / 2.0 - half, -half),
            ResizeHandle::Right => LocalPoint::new(w - half, h / 2.0 - half),
            ResizeHandle::Bottom => LocalPoint::new(w / 2.0 - half, h - half),
            ResizeHandle::Left => LocalPoint::new(-half, h / 2.0 - half),
        }
    }
}

/// Addresses one handle of one shape.
///
/// The shape is referenced by id, so a stale `HandleId` simply fails to
/// resolve once the shape is deselected or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId {
    pub shape: ShapeId,
    pub role: ResizeHandle,
}

impl HandleId {
    pub fn new(shape: ShapeId, role: ResizeHandle) -> Self {
        Self { shape, role }
    }
}

/// Phase of the pointer interaction on a handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseState {
    #[default]
    Idle,
    Down,
    Moving,
    Released,
}

/// A live handle on a selected shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Handle {
    shape: ShapeId,
    role: ResizeHandle,
    /// Top-left of the handle square, local to the owning shape.
    position: LocalPoint,
    /// Pointer position at the last press, local to the handle.
    mouse_down: LocalPoint,
    state: MouseState,
}

impl Handle {
    pub fn new(shape: ShapeId, role: ResizeHandle) -> Self {
        Self {
            shape,
            role,
            position: LocalPoint::default(),
            mouse_down: LocalPoint::default(),
            state: MouseState::Idle,
        }
    }

    pub fn id(&self) -> HandleId {
        HandleId::new(self.shape, self.role)
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn role(&self) -> ResizeHandle {
        self.role
    }

    pub fn position(&self) -> LocalPoint {
        self.position
    }

    pub fn mouse_down(&self) -> LocalPoint {
        self.mouse_down
    }

    pub fn state(&self) -> MouseState {
        self.state
    }

    /// Place the handle for a shape of the given size.
    pub fn place(&mut self, size: CanvasSize) {
        self.position = self.role.position(size);
    }

    /// Pointer pressed on the handle.
    pub fn press(&mut self, pos: LocalPoint) {
        self.mouse_down = pos;
        self.state = MouseState::Down;
    }

    /// Pointer moved while grabbed. Returns false if no press preceded it.
    pub fn drag(&mut self) -> bool {
        match self.state {
            MouseState::Down | MouseState::Moving => {
                self.state = MouseState::Moving;
                true
            }
            MouseState::Idle | MouseState::Released => false,
        }
    }

    /// Pointer released.
    pub fn release(&mut self) {
        self.state = MouseState::Released;
    }

    /// Return to idle after a completed interaction.
    pub fn reset(&mut self) {
        self.state = MouseState::Idle;
    }
}

/// Build the full handle set for a shape of `size`, in index order.
pub fn create_handles(shape: ShapeId, size: CanvasSize) -> Vec<Handle> {
    ResizeHandle::ALL
        .iter()
        .map(|&role| {
            let mut handle = Handle::new(shape, role);
            handle.place(size);
            handle
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_indices_round_trip() {
        for (i, role) in ResizeHandle::iter().enumerate() {
            assert_eq!(role.index(), i);
            assert_eq!(ResizeHandle::from_index(i), Some(role));
        }
        assert_eq!(ResizeHandle::from_index(8), None);
    }

    #[test]
    fn test_corners_are_first_four() {
        let corners: Vec<_> = ResizeHandle::iter().filter(|h| h.is_corner()).collect();
        assert_eq!(
            corners,
            vec![
                ResizeHandle::TopLeft,
                ResizeHandle::TopRight,
                ResizeHandle::BottomRight,
                ResizeHandle::BottomLeft
            ]
        );
    }

    #[test]
    fn test_positions_are_offset_by_half_handle() {
        let size = CanvasSize::new(100.0, 60.0);
        let expected = [
            (-4.0, -4.0),
            (96.0, -4.0),
            (96.0, 56.0),
            (-4.0, 56.0),
            (46.0, -4.0),
            (96.0, 26.0),
            (46.0, 56.0),
            (-4.0, 26.0),
        ];
        for (role, (x, y)) in ResizeHandle::ALL.iter().zip(expected) {
            assert_eq!(role.position(size), LocalPoint::new(x, y), "{role}");
        }
    }

    #[test]
    fn test_state_machine_follows_press_move_release() {
        let mut handle = Handle::new(ShapeId::from_u128(1), ResizeHandle::Top);
        assert_eq!(handle.state(), MouseState::Idle);
        assert!(!handle.drag());

        handle.press(LocalPoint::new(3.0, 4.0));
        assert_eq!(handle.state(), MouseState::Down);
        assert_eq!(handle.mouse_down(), LocalPoint::new(3.0, 4.0));

        assert!(handle.drag());
        assert!(handle.drag());
        assert_eq!(handle.state(), MouseState::Moving);

        handle.release();
        assert_eq!(handle.state(), MouseState::Released);
        assert!(!handle.drag());

        handle.reset();
        assert_eq!(handle.state(), MouseState::Idle);
    }

    #[test]
    fn test_create_handles_builds_eight_in_order() {
        let id = ShapeId::from_u128(7);
        let handles = create_handles(id, CanvasSize::new(40.0, 40.0));
        assert_eq!(handles.len(), 8);
        for (i, handle) in handles.iter().enumerate() {
            assert_eq!(handle.role().index(), i);
            assert_eq!(handle.shape(), id);
        }
    }
}
