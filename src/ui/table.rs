//! Plain-text rendering of book rows. A Ratatui `Table` is drawn into an
//! off-screen buffer sized to fit the content, then read back cell by cell.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Row, Table, Widget};

use crate::models::Book;

const HEADERS: [&str; 4] = ["ID", "Title", "Author", "QTY"];
const COLUMN_SPACING: u16 = 3;
/// Left and right border plus one column of padding on each side.
const FRAME_WIDTH: usize = 4;
/// Top and bottom border plus the header row.
const FRAME_HEIGHT: usize = 3;

fn display_width(text: &str) -> usize {
    Line::from(text).width()
}

fn book_cells(book: &Book) -> [String; 4] {
    [
        book.id.to_string(),
        book.title.clone(),
        book.author.clone(),
        book.quantity.to_string(),
    ]
}

/// Render `books` as a bordered grid with an `ID | Title | Author | QTY`
/// header. Every returned line ends with a newline.
pub fn render_books(books: &[Book]) -> String {
    let cells: Vec<[String; 4]> = books.iter().map(book_cells).collect();

    let mut widths = HEADERS.map(display_width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let content_width = widths.iter().sum::<usize>()
        + COLUMN_SPACING as usize * (widths.len() - 1)
        + FRAME_WIDTH;
    let area = Rect::new(
        0,
        0,
        u16::try_from(content_width).unwrap_or(u16::MAX),
        u16::try_from(cells.len() + FRAME_HEIGHT).unwrap_or(u16::MAX),
    );

    let constraints = widths.map(|width| Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX)));
    let table = Table::new(cells.into_iter().map(Row::new), constraints)
        .header(Row::new(HEADERS).style(Style::default().add_modifier(Modifier::BOLD)))
        .column_spacing(COLUMN_SPACING)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::horizontal(1)),
        );

    let mut buffer = Buffer::empty(area);
    table.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut skip = 0;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            line.push_str(symbol);
            // Wide glyphs occupy the following cells too.
            skip = display_width(symbol).saturating_sub(1);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, quantity: i64) -> Book {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    #[test]
    fn renders_header_and_rows_inside_a_rounded_frame() {
        let rendered = render_books(&[
            book(1, "Dune", "Frank Herbert", 4),
            book(2, "1984", "George Orwell", 7),
        ]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[4].starts_with('╰'));
        assert!(lines[1].contains("ID"));
        assert!(lines[1].contains("Author"));
        assert!(lines[2].contains("Dune"));
        assert!(lines[2].contains("Frank Herbert"));
        assert!(lines[3].contains("George Orwell"));
        assert!(lines[3].contains('7'));
    }

    #[test]
    fn columns_grow_to_fit_long_values() {
        let title = "The Hitchhiker's Guide to the Galaxy";
        let rendered = render_books(&[book(10, title, "Douglas Adams", 42)]);
        assert!(rendered.contains(title));

        let widths: Vec<usize> = rendered.lines().map(display_width).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
