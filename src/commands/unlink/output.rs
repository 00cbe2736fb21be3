use super::execute::UnlinkResult;
use crate::output::Outputable;

impl Outputable for UnlinkResult {
    fn to_table(&self) -> String {
        format!("Unlinked [{}] -> [{}]", self.parent, self.child)
    }
}
