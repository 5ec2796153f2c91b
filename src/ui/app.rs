use crate::ui::search::{SearchSignal, SearchState};
use crate::ui::store::Store;
use crate::ui::text_input::TextInput;

pub struct App {
    should_quit: bool,
    store: Store,
    input: TextInput,
    /// Registry host shown in the header.
    registry_label: String,
    /// Spinner frame counter, advanced only while loading.
    animation_tick: u8,
}

impl App {
    pub fn new(registry_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            store: Store::new(),
            input: TextInput::new(),
            registry_label: registry_label.into(),
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn search_state(&self) -> &SearchState {
        self.store.state()
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    pub fn registry_label(&self) -> &str {
        &self.registry_label
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.store.select(|s| s.loading) {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        self.input.insert_str(text);
    }

    /// Take the typed term for submission, clearing the field.
    pub fn take_submission(&mut self) -> String {
        self.input.take()
    }

    /// Feed a terminal signal from the dispatcher into the store.
    pub fn on_signal(&mut self, signal: SearchSignal) {
        self.store.dispatch(signal);
    }
}
