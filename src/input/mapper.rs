use egui::{Pos2, Rect};

/// Converts viewport pointer positions into stage-local coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageMapper {
    stage_rect: Option<Rect>,
}

impl StageMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the stage was laid out this frame
    pub fn set_stage_rect(&mut self, rect: Rect) {
        self.stage_rect = Some(rect);
    }

    /// Forget the stage, e.g. when it is not shown
    pub fn clear(&mut self) {
        self.stage_rect = None;
    }

    pub fn stage_rect(&self) -> Option<Rect> {
        self.stage_rect
    }

    /// `viewport - stage.min`, or the origin while no stage has been laid out
    pub fn to_stage(&self, viewport: Pos2) -> Pos2 {
        match self.stage_rect {
            Some(rect) => (viewport - rect.min).to_pos2(),
            None => Pos2::ZERO,
        }
    }

    /// Inverse of [`Self::to_stage`], used when painting
    pub fn to_viewport(&self, stage: Pos2) -> Pos2 {
        match self.stage_rect {
            Some(rect) => rect.min + stage.to_vec2(),
            None => stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_maps_relative_to_stage_origin() {
        let mut mapper = StageMapper::new();
        mapper.set_stage_rect(Rect::from_min_size(pos2(100.0, 50.0), vec2(800.0, 600.0)));
        assert_eq!(mapper.to_stage(pos2(130.0, 75.0)), pos2(30.0, 25.0));
        assert_eq!(mapper.to_viewport(pos2(30.0, 25.0)), pos2(130.0, 75.0));
    }

    #[test]
    fn test_unmounted_stage_maps_to_origin() {
        let mapper = StageMapper::new();
        assert_eq!(mapper.to_stage(pos2(130.0, 75.0)), Pos2::ZERO);
    }

    #[test]
    fn test_points_left_of_stage_go_negative() {
        let mut mapper = StageMapper::new();
        mapper.set_stage_rect(Rect::from_min_size(pos2(100.0, 50.0), vec2(10.0, 10.0)));
        assert_eq!(mapper.to_stage(pos2(90.0, 40.0)), pos2(-10.0, -10.0));
    }
}
