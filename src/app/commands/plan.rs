use crate::app::Project;
use crate::domain::Step;
use crate::domain::step;

/// Ordered steps a deploy run would execute.
pub fn execute(project: &Project) -> Vec<Step> {
    step::plan(project.config(), project.root(), project.home())
}
