use super::*;

/// Terminal lines for one block of the main region. Nodes carrying the
/// hidden class are skipped along with their children.
pub(crate) fn block_lines(node: &Node, width: u16) -> Vec<Line<'static>> {
  let mut lines = Vec::new();

  push_node(&mut lines, node, BASE_INDENT, usize::from(width));

  lines.push(Line::from(Span::raw(BASE_INDENT)));

  lines
}

fn push_node(
  lines: &mut Vec<Line<'static>>,
  node: &Node,
  indent: &str,
  width: usize,
) {
  if node.has_class(HIDDEN_CLASS) {
    return;
  }

  match node.tag() {
    Tag::Article | Tag::Fragment | Tag::Main | Tag::Select => {
      for child in node.children() {
        push_node(lines, child, indent, width);
      }
    }
    Tag::Section => {
      let nested = format!("{indent}{COMMENT_INDENT}");

      for child in node.children() {
        lines.push(Line::from(Span::raw(nested.clone())));
        push_node(lines, child, &nested, width);
      }
    }
    Tag::Button => lines.push(Line::from(vec![
      Span::raw(indent.to_string()),
      Span::styled(
        format!("[ {} ]", node.text()),
        Style::default().fg(Color::Cyan),
      ),
    ])),
    Tag::H2 => push_text(
      lines,
      node.text(),
      indent,
      width,
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    Tag::H3 => push_text(
      lines,
      node.text(),
      indent,
      width,
      Style::default().fg(Color::White),
    ),
    Tag::P if node.has_class(DEFAULT_TEXT_CLASS) => {
      push_text(lines, node.text(), indent, width, Style::default());
    }
    Tag::Option | Tag::P => push_text(
      lines,
      node.text(),
      indent,
      width,
      Style::default().fg(Color::DarkGray),
    ),
  }
}

fn push_text(
  lines: &mut Vec<Line<'static>>,
  text: &str,
  indent: &str,
  width: usize,
  style: Style,
) {
  let wrap_width = width.saturating_sub(indent.chars().count()).max(1);

  for line in wrap_text(text, wrap_width) {
    lines.push(Line::from(vec![
      Span::raw(indent.to_string()),
      Span::styled(line, style),
    ]));
  }
}
