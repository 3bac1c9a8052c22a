//! Drag-and-drop To-Do List Frontend Entry Point

fn main() {
    dnd_todo_ui::run();
}
