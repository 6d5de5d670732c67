//! 드래그 벡터 -> 제스처 분류

/// 기본 데드존 (논리 픽셀)
pub const DEFAULT_DEADZONE: f32 = 5.0;

/// 키 위에서의 제스처
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Tap,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
}

/// 누른 위치와 뗀 위치의 차이(dx, dy)로 제스처 판별
///
/// 두 축 모두 데드존 미만이면 탭. 그 외에는 절대값이 더 큰 축이 방향을
/// 결정하고(같으면 세로), 해당 축이 데드존을 넘지 못하면 None.
/// 화면 좌표계이므로 dy > 0 이 아래쪽.
pub fn classify_drag(dx: f32, dy: f32, deadzone: f32) -> Option<Gesture> {
    if dx.abs() < deadzone && dy.abs() < deadzone {
        return Some(Gesture::Tap);
    }

    let gesture = if dx.abs() > dy.abs() {
        if dx > deadzone {
            Some(Gesture::SwipeRight)
        } else if dx < -deadzone {
            Some(Gesture::SwipeLeft)
        } else {
            None
        }
    } else if dy > deadzone {
        Some(Gesture::SwipeDown)
    } else if dy < -deadzone {
        Some(Gesture::SwipeUp)
    } else {
        None
    };

    log::trace!("drag ({}, {}) -> {:?}", dx, dy, gesture);
    gesture
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_inside_deadzone() {
        assert_eq!(classify_drag(0.0, 0.0, DEFAULT_DEADZONE), Some(Gesture::Tap));
        assert_eq!(classify_drag(4.9, -4.9, DEFAULT_DEADZONE), Some(Gesture::Tap));
    }

    #[test]
    fn test_horizontal_swipes() {
        assert_eq!(classify_drag(30.0, 2.0, DEFAULT_DEADZONE), Some(Gesture::SwipeRight));
        assert_eq!(classify_drag(-30.0, 10.0, DEFAULT_DEADZONE), Some(Gesture::SwipeLeft));
    }

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(classify_drag(3.0, 20.0, DEFAULT_DEADZONE), Some(Gesture::SwipeDown));
        assert_eq!(classify_drag(-3.0, -20.0, DEFAULT_DEADZONE), Some(Gesture::SwipeUp));
        // 같은 크기는 세로 우선
        assert_eq!(classify_drag(12.0, 12.0, DEFAULT_DEADZONE), Some(Gesture::SwipeDown));
    }

    #[test]
    fn test_boundary_is_not_a_gesture() {
        // 데드존과 정확히 같은 이동은 탭도 스와이프도 아님
        assert_eq!(classify_drag(5.0, 0.0, DEFAULT_DEADZONE), None);
        assert_eq!(classify_drag(0.0, -5.0, DEFAULT_DEADZONE), None);
    }

    #[test]
    fn test_custom_deadzone() {
        assert_eq!(classify_drag(30.0, 0.0, 50.0), Some(Gesture::Tap));
        assert_eq!(classify_drag(60.0, 0.0, 50.0), Some(Gesture::SwipeRight));
    }
}
