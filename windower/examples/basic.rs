// Example: range computation and reconciliation against a plain `Vec` of rows.
use windower::{
    Align, MaterializedSet, Materializer, ViewportGeometry, WindowError, WindowOptions, Windower,
    reconcile,
};

struct Rows(Vec<String>);

impl Materializer<usize> for Rows {
    type Error = WindowError;

    fn evict(&mut self, index: usize, _handle: usize) {
        let label = format!("row {index}");
        self.0.retain(|r| *r != label);
    }

    fn create(&mut self, index: usize, anchor: Option<&usize>) -> Result<usize, WindowError> {
        let label = format!("row {index}");
        match anchor.and_then(|a| self.0.iter().position(|r| *r == format!("row {a}"))) {
            Some(pos) => self.0.insert(pos, label),
            None => self.0.push(label),
        }
        Ok(index)
    }
}

fn main() -> Result<(), WindowError> {
    let mut w = Windower::new(WindowOptions::new(10_000, 50).with_overscan(2))?;
    let mut set = MaterializedSet::new();
    let mut rows = Rows(Vec::new());

    for offset in [0u64, 1_000, 400] {
        w.set_geometry(ViewportGeometry::new(offset, 500));
        let plan = reconcile(&set, w.range());
        set.apply(&plan, &mut rows)?;
        println!(
            "offset={offset} range={:?} evicted={} added={} first={:?} last={:?}",
            w.range(),
            plan.to_evict.len(),
            plan.to_add.len(),
            rows.0.first(),
            rows.0.last()
        );
    }

    let off = w.scroll_to_index_offset(9_999, Align::End);
    println!("total_size={} scroll_to_last={off}", w.total_size());
    Ok(())
}
