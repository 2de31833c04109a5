//! # View Layer
//!
//! Projects the view model into the terminal: category sidebar, item
//! cards, cart pane, status bar, and the modal detail overlay. The
//! renderer holds no storefront state of its own.

use crate::shop::events::{AppMode, Pane};
use crate::shop::format::{format_taka, truncate_description};
use crate::shop::io::RenderStream;
use crate::shop::view_models::ViewModel;
use anyhow::Result;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! execute_term {
    ($($arg:expr),* $(,)?) => {
        execute!($($arg),*).map_err(anyhow::Error::from)
    };
}

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

/// Width of the category sidebar in columns
const SIDEBAR_WIDTH: u16 = 22;

/// Width of the cart pane in columns
const CART_WIDTH: u16 = 34;

/// Rows per item card (name, description, badge line, separator)
const CARD_HEIGHT: u16 = 4;

/// Sidebar entry for the unfiltered view
const ALL_PLANTS_LABEL: &str = "All Plants";

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the category sidebar and item cards
    fn render_catalog(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the cart pane
    fn render_cart(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the detail overlay (no-op when closed)
    fn render_detail(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the status bar
    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Cleanup terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Terminal-based view renderer over an injected render stream
pub struct TerminalRenderer<RS: RenderStream> {
    stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer that owns the given render stream
    pub fn with_render_stream(stream: RS) -> Result<Self> {
        let terminal_size = stream.get_size()?;
        Ok(Self {
            stream,
            terminal_size,
        })
    }

    /// Update terminal size
    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Get current terminal size
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Columns available to the items area between sidebar and cart
    fn items_area_width(&self) -> u16 {
        self.terminal_size
            .0
            .saturating_sub(SIDEBAR_WIDTH + CART_WIDTH + 2)
    }

    /// Rows available to the content areas (between header and status bar)
    fn content_height(&self) -> u16 {
        self.terminal_size.1.saturating_sub(2)
    }

    /// Print text at a position, clipped and padded to a fixed width
    fn print_at(&mut self, x: u16, y: u16, text: &str, width: u16) -> Result<()> {
        execute_term!(
            self.stream,
            MoveTo(x, y),
            Print(pad_to_width(text, width as usize))
        )
    }

    fn render_header(&mut self, view_model: &ViewModel) -> Result<()> {
        let (width, _) = self.terminal_size;
        let active = match view_model.catalog().active_category() {
            Some(id) => view_model
                .catalog()
                .categories()
                .iter()
                .find(|category| category.id == id)
                .map(|category| category.name.clone())
                .unwrap_or_else(|| id.to_string()),
            None => ALL_PLANTS_LABEL.to_string(),
        };

        execute_term!(self.stream, MoveTo(0, 0), SetAttribute(Attribute::Bold))?;
        execute_term!(
            self.stream,
            Print(pad_to_width(
                &format!(" 🌿 Greenline Plant Store — {active}"),
                width as usize
            )),
            SetAttribute(Attribute::Reset)
        )
    }

    fn render_categories(&mut self, view_model: &ViewModel) -> Result<()> {
        let focused = view_model.current_pane() == Pane::Categories
            && view_model.mode() == AppMode::Browse;
        let height = self.content_height();

        self.print_pane_title(0, Pane::Categories.title(), SIDEBAR_WIDTH, focused)?;

        // Sidebar entries: "All Plants" then the fetched categories
        let labels: Vec<(Option<&str>, &str)> = std::iter::once((None, ALL_PLANTS_LABEL))
            .chain(
                view_model
                    .catalog()
                    .categories()
                    .iter()
                    .map(|category| (Some(category.id.as_str()), category.name.as_str())),
            )
            .collect();

        for row in 0..height.saturating_sub(1) {
            let y = 2 + row;
            match labels.get(row as usize) {
                Some((id, label)) => {
                    let active = *id == view_model.catalog().active_category();
                    let selected = focused && row as usize == view_model.category_index();
                    let marker = if selected { "▶ " } else { "  " };

                    if active {
                        // Exactly one entry carries the active highlight
                        execute_term!(
                            self.stream,
                            MoveTo(0, y),
                            SetBackgroundColor(Color::DarkGreen),
                            SetForegroundColor(Color::White),
                            Print(pad_to_width(
                                &format!("{marker}{label}"),
                                SIDEBAR_WIDTH as usize
                            )),
                            ResetColor
                        )?;
                    } else {
                        self.print_at(0, y, &format!("{marker}{label}"), SIDEBAR_WIDTH)?;
                    }
                }
                None => self.print_at(0, y, "", SIDEBAR_WIDTH)?,
            }
        }

        Ok(())
    }

    fn render_items(&mut self, view_model: &ViewModel) -> Result<()> {
        let focused =
            view_model.current_pane() == Pane::Items && view_model.mode() == AppMode::Browse;
        let x = SIDEBAR_WIDTH + 1;
        let width = self.items_area_width();
        let height = self.content_height();

        self.print_pane_title(x, Pane::Items.title(), width, focused)?;

        let body_top: u16 = 2;
        let body_height = height.saturating_sub(1);

        if view_model.catalog().is_loading() {
            self.clear_area(x, body_top, width, body_height)?;
            let y = body_top + body_height / 2;
            return self.print_at(x, y, "  Loading plants...", width);
        }

        let items = view_model.catalog().items();
        if items.is_empty() {
            self.clear_area(x, body_top, width, body_height)?;
            return self.print_at(x, body_top, "  No plants to show.", width);
        }

        // Window the card list around the selection
        let visible_cards = (body_height / CARD_HEIGHT).max(1) as usize;
        let selected = view_model.item_index();
        let first = selected.saturating_sub(visible_cards.saturating_sub(1));

        let mut y = body_top;
        for (index, item) in items.iter().enumerate().skip(first).take(visible_cards) {
            let is_selected = focused && index == selected;
            let marker = if is_selected { "▶ " } else { "  " };

            execute_term!(self.stream, MoveTo(x, y), SetAttribute(Attribute::Bold))?;
            execute_term!(
                self.stream,
                Print(pad_to_width(
                    &format!("{marker}{}", item.name),
                    width as usize
                )),
                SetAttribute(Attribute::Reset)
            )?;

            let description = truncate_description(&item.description);
            self.print_at(x, y + 1, &format!("  {description}"), width)?;

            execute_term!(self.stream, MoveTo(x, y + 2), SetForegroundColor(Color::Green))?;
            execute_term!(
                self.stream,
                Print(pad_to_width(
                    &format!("  [{}]  {}", item.category, format_taka(item.price)),
                    width as usize
                )),
                ResetColor
            )?;

            self.print_at(x, y + 3, "", width)?;
            y += CARD_HEIGHT;
        }

        // Blank any rows below the last card
        while y < body_top + body_height {
            self.print_at(x, y, "", width)?;
            y += 1;
        }

        Ok(())
    }

    fn print_pane_title(&mut self, x: u16, title: &str, width: u16, focused: bool) -> Result<()> {
        let marker = if focused { "●" } else { "○" };
        execute_term!(
            self.stream,
            MoveTo(x, 1),
            SetAttribute(Attribute::Underlined),
            Print(pad_to_width(&format!("{marker} {title}"), width as usize)),
            SetAttribute(Attribute::Reset)
        )
    }

    fn clear_area(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<()> {
        for row in 0..height {
            self.print_at(x, y + row, "", width)?;
        }
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.stream.enable_raw_mode()?;
        self.stream.enter_alternate_screen()?;
        self.stream.hide_cursor()?;
        self.stream.clear_screen()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.stream.clear_screen()?;
        self.render_header(view_model)?;
        self.render_catalog(view_model)?;
        self.render_cart(view_model)?;
        self.render_status_bar(view_model)?;
        self.render_detail(view_model)?;
        Ok(())
    }

    fn render_catalog(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_header(view_model)?;
        self.render_categories(view_model)?;
        self.render_items(view_model)?;
        Ok(())
    }

    fn render_cart(&mut self, view_model: &ViewModel) -> Result<()> {
        let (width, _) = self.terminal_size;
        let x = width.saturating_sub(CART_WIDTH);
        let height = self.content_height();
        let focused =
            view_model.current_pane() == Pane::Cart && view_model.mode() == AppMode::Browse;

        let cart = view_model.cart();
        self.print_pane_title(x, &format!("Cart ({})", cart.len()), CART_WIDTH, focused)?;

        let body_top: u16 = 2;
        // Reserve two rows for the total and the hint line
        let body_height = height.saturating_sub(3);

        if cart.is_empty() {
            self.clear_area(x, body_top, CART_WIDTH, body_height)?;
            self.print_at(x, body_top, "  Cart is empty.", CART_WIDTH)?;
        } else {
            // Two rows per line: name, then quantity and subtotal
            let visible_lines = (body_height / 2).max(1) as usize;
            let selected = view_model.cart_index();
            let first = selected.saturating_sub(visible_lines.saturating_sub(1));

            let mut y = body_top;
            for (index, line) in cart.lines().iter().enumerate().skip(first).take(visible_lines) {
                let marker = if focused && index == selected {
                    "▶ "
                } else {
                    "  "
                };

                self.print_at(x, y, &format!("{marker}{}", line.name), CART_WIDTH)?;
                self.print_at(
                    x,
                    y + 1,
                    &format!("    x{}  {}", line.quantity, format_taka(line.subtotal())),
                    CART_WIDTH,
                )?;
                y += 2;
            }

            while y < body_top + body_height {
                self.print_at(x, y, "", CART_WIDTH)?;
                y += 1;
            }
        }

        // Total row and quantity-control hints
        let total_y = body_top + body_height;
        execute_term!(self.stream, MoveTo(x, total_y), SetAttribute(Attribute::Bold))?;
        execute_term!(
            self.stream,
            Print(pad_to_width(
                &format!("  Total {}", format_taka(cart.total())),
                CART_WIDTH as usize
            )),
            SetAttribute(Attribute::Reset)
        )?;
        self.print_at(x, total_y + 1, "  [+] [-] [x] adjust line", CART_WIDTH)
    }

    fn render_detail(&mut self, view_model: &ViewModel) -> Result<()> {
        let Some(item) = view_model.detail().item() else {
            return Ok(());
        };

        let (width, height) = self.terminal_size;
        let box_width = width.saturating_sub(8).min(62).max(20);
        let inner_width = (box_width - 4) as usize;

        let description = if item.description.is_empty() {
            crate::shop::format::NO_DESCRIPTION.to_string()
        } else {
            item.description.clone()
        };
        let body_lines = wrap_text(&description, inner_width);

        // Borders, name, category, optional image line, two blanks, hint
        let chrome_rows: u16 = if item.image_url.is_empty() { 7 } else { 8 };
        let box_height =
            (body_lines.len() as u16 + chrome_rows).min(height.saturating_sub(2));
        let left = (width.saturating_sub(box_width)) / 2;
        let top = (height.saturating_sub(box_height)) / 2;

        let horizontal = "─".repeat((box_width - 2) as usize);
        self.print_at(left, top, &format!("┌{horizontal}┐"), box_width)?;

        let mut row = top + 1;
        let mut print_boxed = |renderer: &mut Self, text: &str, bold: bool| -> Result<()> {
            execute_term!(renderer.stream, MoveTo(left, row))?;
            if bold {
                execute_term!(renderer.stream, SetAttribute(Attribute::Bold))?;
            }
            execute_term!(
                renderer.stream,
                Print(format!("│ {} │", pad_to_width(text, inner_width))),
                SetAttribute(Attribute::Reset)
            )?;
            row += 1;
            Ok(())
        };

        print_boxed(self, &item.name, true)?;
        print_boxed(
            self,
            &format!("[{}]  {}", item.category, format_taka(item.price)),
            false,
        )?;
        if !item.image_url.is_empty() {
            print_boxed(self, &item.image_url, false)?;
        }
        print_boxed(self, "", false)?;

        let body_rows = box_height.saturating_sub(chrome_rows) as usize;
        for line in body_lines.iter().take(body_rows.max(1)) {
            print_boxed(self, line, false)?;
        }

        print_boxed(self, "", false)?;
        print_boxed(self, "[a] Add to cart    [Esc] Close", false)?;

        self.print_at(
            left,
            row,
            &format!("└{horizontal}┘"),
            box_width,
        )
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let (width, height) = self.terminal_size;
        let y = height.saturating_sub(1);

        let left = match view_model.mode() {
            AppMode::Detail => " DETAIL │ [a] add  [Esc] close".to_string(),
            AppMode::Browse => format!(
                " {} │ {} plants │ Tab switch  Enter open  a add  r refresh  q quit",
                view_model.current_pane().title(),
                view_model.catalog().items().len()
            ),
        };

        let message = view_model.status_message().unwrap_or("");
        let content = if message.is_empty() {
            left
        } else {
            format!("{left} │ {message}")
        };

        execute_term!(
            self.stream,
            MoveTo(0, y),
            SetAttribute(Attribute::Reverse),
            Print(pad_to_width(&content, width as usize)),
            SetAttribute(Attribute::Reset)
        )
    }

    fn cleanup(&mut self) -> Result<()> {
        self.stream.show_cursor()?;
        self.stream.leave_alternate_screen()?;
        self.stream.disable_raw_mode()?;
        Ok(())
    }
}

/// Clip to a character budget and pad with spaces to exactly fill it
fn pad_to_width(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    let padding = width.saturating_sub(clipped.chars().count());
    format!("{clipped}{}", " ".repeat(padding))
}

/// Greedy word wrap; words longer than the width are hard-split
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if !current.is_empty() && current.chars().count() + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
        }

        if word_len > width {
            // Hard-split an overlong word across lines
            for ch in word.chars() {
                if current.chars().count() == width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
