use crate::config::FixtureConfig;
use crate::io::LedMatrix;
use crate::trafficlight::MatrixCell;
use crate::trafficlight::state::FixtureState;
use crate::wait::hold_rendering;

fn show(matrix: &mut impl LedMatrix, cell: &MatrixCell) {
    matrix.clear();
    matrix.set_cell(cell.index, cell.color.r, cell.color.g, cell.color.b);
    matrix.flush();
}

pub async fn run_matrix(
    state: &FixtureState,
    config: &FixtureConfig,
    mut matrix: impl LedMatrix,
) -> ! {
    loop {
        let snapshot = state.read();
        show(&mut matrix, &state.presentation(snapshot).cell);

        // night mode keeps redrawing the caution cell on its own short cadence
        let budget = if snapshot.night_mode {
            config.night_refresh
        } else {
            state.phase_duration()
        };
        hold_rendering(state, config.poll_slice, budget, snapshot).await;
    }
}
