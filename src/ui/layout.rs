use ratatui::layout::Rect;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split the screen into header, input box, results body and footer.
///
/// Fixed rows are taken top-down first, so on tiny terminals the body
/// shrinks to zero before anything else does.
pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let input_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(
        area.height
            .saturating_sub(header_height)
            .saturating_sub(input_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let input = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: input_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + input_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + input_height + footer_height),
    };
    Regions {
        header,
        input,
        body,
        footer,
    }
}
