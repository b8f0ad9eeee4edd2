use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MenuLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

pub struct QuestionLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub info_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        header_area: chunks[0],
        list_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_question_chunks(area: Rect) -> QuestionLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Length(3),
        ])
        .split(area);

    QuestionLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        info_area: chunks[3],
        help_area: chunks[4],
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = calculate_menu_chunks(area);

        // margin 1 leaves 22 rows: 3 + 16 + 3
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.list_area.height, 16);
        assert_eq!(layout.list_area.width, 78);
    }

    #[test]
    fn test_question_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_question_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.question_area.height >= 3);
        assert!(layout.answer_area.height > 0);
        assert!(layout.info_area.height > 0);
        assert!(layout.header_area.y < layout.question_area.y);
        assert!(layout.answer_area.y < layout.info_area.y);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 6, area);
        assert_eq!(rect, Rect::new(20, 9, 40, 6));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(centered_rect(40, 6, area), area);
    }
}
