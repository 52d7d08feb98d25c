//! Grid layout shared by every touchscreen panel.

use gtk4::prelude::*;
use gtk4::{Grid, Widget};

use super::navigator::Navigator;
use super::widgets::make_icon_label_button;

/// Columns in every panel grid. Buttons are attached at columns 1..=4.
pub const PANEL_COLUMNS: i32 = 4;

pub trait Panel {
    /// Stack name used for navigation.
    fn name(&self) -> &'static str;
    fn widget(&self) -> Widget;
}

pub struct CommonPanel {
    grid: Grid,
    navigator: Navigator,
    parent: Option<&'static str>,
    rows: i32,
}

impl CommonPanel {
    pub fn new(navigator: &Navigator, parent: Option<&'static str>, rows: i32) -> Self {
        let grid = Grid::new();
        grid.set_row_homogeneous(true);
        grid.set_column_homogeneous(true);
        grid.set_row_spacing(6);
        grid.set_column_spacing(6);
        grid.set_margin_top(6);
        grid.set_margin_bottom(6);
        grid.set_margin_start(6);
        grid.set_margin_end(6);
        grid.add_css_class("panel");

        Self {
            grid,
            navigator: navigator.clone(),
            parent,
            rows,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn attach(&self, widget: &impl IsA<Widget>, column: i32, row: i32) {
        self.grid.attach(widget, column, row, 1, 1);
    }

    /// Finish the layout: panels with a parent get a Back button in the
    /// bottom-right cell.
    pub fn initialize(&self) {
        let Some(parent) = self.parent else {
            return;
        };

        let back = make_icon_label_button("go-previous-symbolic", "Back");
        back.add_css_class("back");
        let navigator = self.navigator.clone();
        back.connect_clicked(move |_| navigator.show(parent));
        self.attach(&back, PANEL_COLUMNS, self.rows - 1);
    }
}
