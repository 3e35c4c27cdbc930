use ratatui::layout::{Constraint, Layout, Rect};

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the form pane (left) and the list pane (right).
pub fn body_panes(body: Rect) -> (Rect, Rect) {
    let [form, list] =
        Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)]).areas(body);
    (form, list)
}

/// Rectangle of at most `width` × `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn tiny_screen_gives_body_nothing() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 20, 10), 40, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }

    #[test]
    fn panes_split_body_width() {
        let (form, list) = body_panes(Rect::new(0, 3, 100, 20));
        assert_eq!(form.width + list.width, 100);
        assert!(list.width > form.width);
    }
}
