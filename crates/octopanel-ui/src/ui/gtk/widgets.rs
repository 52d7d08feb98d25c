use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Image, Label, Orientation};

const ICON_SIZE: i32 = 48;

/// Icon above a caption, sized for a touchscreen.
pub fn icon_label_content(icon: &str, label: &str) -> (Box, Label) {
    let content = Box::new(Orientation::Vertical, 4);
    content.set_halign(Align::Center);
    content.set_valign(Align::Center);

    let img = Image::from_icon_name(icon);
    img.set_pixel_size(ICON_SIZE);

    let lbl = Label::new(Some(label));
    lbl.set_valign(Align::Center);

    content.append(&img);
    content.append(&lbl);
    (content, lbl)
}

pub fn make_icon_label_button(icon: &str, label: &str) -> Button {
    let btn = Button::new();
    let (content, _) = icon_label_content(icon, label);
    btn.set_child(Some(&content));
    btn.set_hexpand(true);
    btn.set_vexpand(true);
    btn
}

/// Same as [`make_icon_label_button`] with an extra CSS class, e.g. `color3`.
pub fn make_styled_button(icon: &str, label: &str, css_class: &str) -> Button {
    let btn = make_icon_label_button(icon, label);
    btn.add_css_class(css_class);
    btn
}
