use serde::{Deserialize, Serialize};

use super::{rotate_point, Point, Rect};

/// Where `add_table` places new tables.
pub const DEFAULT_TABLE_X: f64 = 100.0;
pub const DEFAULT_TABLE_Y: f64 = 100.0;
/// Width and height of the table icon.
pub const DEFAULT_TABLE_SIZE: f64 = 100.0;
pub const DEFAULT_MIN_COVERS: u32 = 1;
pub const DEFAULT_MAX_COVERS: u32 = 4;
/// Offset applied on both axes to a duplicated table.
pub const DUPLICATE_OFFSET: f64 = 40.0;
/// Degrees added by one rotate action.
pub const ROTATION_STEP: u32 = 90;

/// Formats the identifier for the `number`-th generated table (`T-01`, `T-100`).
pub fn table_id(number: u64) -> String {
    format!("T-{:02}", number)
}

/// Extracts the sequence number from a generated identifier.
///
/// Returns `None` for identifiers that do not follow the `<prefix>-<n>` form.
pub fn table_number(id: &str) -> Option<u64> {
    id.split('-').nth(1)?.trim().parse().ok()
}

/// A placeable table icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub min_covers: u32,
    pub max_covers: u32,
    pub active: bool,
    pub width: f64,
    pub height: f64,
    /// Degrees, always within `[0, 360)`.
    pub rotation: u32,
}

impl Table {
    /// Creates the default table for sequence number `number`.
    pub fn new(number: u64) -> Self {
        let id = table_id(number);
        Self {
            name: id.clone(),
            id,
            x: DEFAULT_TABLE_X,
            y: DEFAULT_TABLE_Y,
            min_covers: DEFAULT_MIN_COVERS,
            max_covers: DEFAULT_MAX_COVERS,
            active: true,
            width: DEFAULT_TABLE_SIZE,
            height: DEFAULT_TABLE_SIZE,
            rotation: 0,
        }
    }

    /// Copy of this table under sequence number `number`, shifted by
    /// [`DUPLICATE_OFFSET`] on both axes.
    pub fn duplicate(&self, number: u64) -> Self {
        let id = table_id(number);
        Self {
            name: id.clone(),
            id,
            x: self.x + DUPLICATE_OFFSET,
            y: self.y + DUPLICATE_OFFSET,
            ..self.clone()
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Unrotated footprint.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Advances the rotation by one [`ROTATION_STEP`].
    pub fn rotate_step(&mut self) {
        self.set_rotation(i64::from(self.rotation) + i64::from(ROTATION_STEP));
    }

    /// Sets the rotation, wrapping any angle into `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: i64) {
        self.rotation = degrees.rem_euclid(360) as u32;
    }

    /// Hit test against the footprint rotated about its centre.
    pub fn contains_point(&self, p: Point) -> bool {
        // Rotate point to local coords
        let local = rotate_point(p, self.center(), -(self.rotation as f64));
        self.bounds().contains(local)
    }

    /// Applies every field set in `update`.
    pub fn apply(&mut self, update: &TableUpdate) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(min) = update.min_covers {
            self.min_covers = min;
        }
        if let Some(max) = update.max_covers {
            self.max_covers = max;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(rotation) = update.rotation {
            self.set_rotation(rotation);
        }
    }
}

/// Partial table update; `None` fields are left untouched.
///
/// There is no id field: ids only come from the table counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub name: Option<String>,
    pub min_covers: Option<u32>,
    pub max_covers: Option<u32>,
    pub active: Option<bool>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<i64>,
}

impl TableUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_covers(mut self, min: u32, max: u32) -> Self {
        self.min_covers = Some(min);
        self.max_covers = Some(max);
        self
    }

    pub fn with_min_covers(mut self, min: u32) -> Self {
        self.min_covers = Some(min);
        self
    }

    pub fn with_max_covers(mut self, max: u32) -> Self {
        self.max_covers = Some(max);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_rotation(mut self, degrees: i64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
