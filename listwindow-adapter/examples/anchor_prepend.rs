// Example: keeping a chat timeline pinned while older rows prepend.
use listwindow::ListWindowOptions;
use listwindow_adapter::Controller;

fn main() {
    let options = ListWindowOptions::<u64>::new()
        .with_viewport_height(480)
        .with_estimated_height(64)
        .with_identity(Some(|id: &u64| *id));
    let mut controller = Controller::new(options);

    // Message ids arrive oldest-first; the user has scrolled partway up.
    controller.engine_mut().reset(1_000u64..1_200);
    controller.scroll_to_offset(4_000);

    let anchor = controller
        .capture_first_visible_anchor()
        .expect("identity fn configured and list non-empty");
    println!(
        "before: offset={} anchor={anchor:?}",
        controller.engine().scroll_offset()
    );

    // Fifty older messages load above; every old row shifts down by fifty.
    controller.engine_mut().reset(950u64..1_200);
    let ok = controller.apply_anchor(&anchor);
    println!(
        "after: ok={ok} offset={} first_visible={}",
        controller.engine().scroll_offset(),
        controller.engine().visible_window().start_index
    );
}
