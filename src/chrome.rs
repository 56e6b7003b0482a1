use serde::{Deserialize, Serialize};

/// Screen corner the window docks to when it is first shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Full rectangle of a monitor, in logical pixels. GTK4 reports no
/// panel-free work area, so panels and docks are not subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorArea {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl MonitorArea {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Returns the top-left position placing a `width` x `height` window flush
/// against `corner`. A window larger than the area starts at its edge.
pub fn dock_origin(area: &MonitorArea, width: i32, height: i32, corner: Corner) -> (i32, i32) {
    let left = area.x;
    let top = area.y;
    let right = (area.right() - width).max(area.x);
    let bottom = (area.bottom() - height).max(area.y);

    match corner {
        Corner::TopLeft => (left, top),
        Corner::TopRight => (right, top),
        Corner::BottomLeft => (left, bottom),
        Corner::BottomRight => (right, bottom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const AREA: MonitorArea = MonitorArea {
        x: 0,
        y: 0,
        width: 1920,
        height: 1040,
    };

    #[rstest]
    #[case(Corner::TopLeft, (0, 0))]
    #[case(Corner::TopRight, (1520, 0))]
    #[case(Corner::BottomLeft, (0, 740))]
    #[case(Corner::BottomRight, (1520, 740))]
    fn test_dock_origin(#[case] corner: Corner, #[case] expected: (i32, i32)) {
        assert_eq!(dock_origin(&AREA, 400, 300, corner), expected);
    }

    #[test]
    fn test_dock_origin_offset_monitor() {
        let area = MonitorArea {
            x: 1920,
            y: 30,
            width: 1280,
            height: 994,
        };
        assert_eq!(dock_origin(&area, 400, 300, Corner::BottomRight), (2800, 724));
    }

    #[test]
    fn test_monitor_area_edges() {
        let area = MonitorArea {
            x: -1280,
            y: 0,
            width: 1280,
            height: 1024,
        };
        assert_eq!(area.right(), 0);
        assert_eq!(area.bottom(), 1024);
        assert_eq!(dock_origin(&area, 400, 300, Corner::BottomLeft), (-1280, 724));
    }

    #[test]
    fn test_oversized_window_stays_inside() {
        assert_eq!(dock_origin(&AREA, 4000, 3000, Corner::BottomRight), (0, 0));
    }

    #[test]
    fn test_corner_deserializes_kebab_case() {
        let corner: Corner = serde_json::from_str(r#""top-left""#).unwrap();
        assert_eq!(corner, Corner::TopLeft);
        assert_eq!(Corner::default(), Corner::BottomRight);
    }
}
