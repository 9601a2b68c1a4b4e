menu_editor::start!();
