// Example: host measurements correcting estimates after render.
use listwindow::{ListWindow, ListWindowOptions};

fn main() {
    let options = ListWindowOptions::<&'static str>::new()
        .with_viewport_height(240)
        .with_overscan(1)
        .with_estimated_height(60);
    let mut list = ListWindow::new(options);

    list.reset(["intro", "chapter one", "chapter two", "appendix", "index"]);
    println!(
        "estimated: total={} offsets={:?}",
        list.total_height(),
        offsets(&list)
    );

    // The host renders the window, measures real pixel heights, reports back.
    let mut now = 0;
    for (index, px) in [(0, 96), (1, 58), (2, 130)] {
        let delta = list.on_height_measured(index, px, now).expect("fresh index");
        println!(
            "measure({index}, {px}): delta={delta} pending={}",
            list.update_pending()
        );
        now += 4;
    }

    // Small deltas were absorbed on the spot; the big ones settle one
    // debounce interval after the last measurement.
    if let Some(deadline) = list.next_deadline_ms() {
        list.tick(deadline);
    }
    println!(
        "measured: total={} offsets={:?}",
        list.total_height(),
        offsets(&list)
    );
}

fn offsets(list: &ListWindow<&'static str>) -> Vec<u64> {
    (0..list.len()).map(|i| list.offset_of(i)).collect()
}
