use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::EscapeRoom;
use storage::repository::Storage;

use crate::app::RoomShell;
use crate::context::build_app_context;

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Open a room over `storage` and mount the room shell around it.
pub async fn setup_view_harness(storage: Storage) -> ViewHarness {
    let room = EscapeRoom::open(&storage).await.expect("open room");
    let dom = VirtualDom::new(RoomShell).with_root_context(build_app_context(room));
    ViewHarness { dom, storage }
}
