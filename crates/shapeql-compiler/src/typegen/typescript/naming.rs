//! Interface name assignment.

use shapeql_core::utils::to_pascal_case;

use super::Emitter;

impl Emitter<'_> {
    pub(super) fn base_root_name(&self) -> String {
        let name = self
            .config
            .root_name
            .as_deref()
            .or(self.query.operation_name())
            .unwrap_or("Query");
        to_pascal_case(name)
    }

    /// Name for the interface of a nested result level: parent name + key.
    pub(super) fn nested_name(&mut self, parent: &str, key: &str) -> String {
        self.unique_name(&format!("{parent}{}", to_pascal_case(key)))
    }

    pub(super) fn unique_name(&mut self, base: &str) -> String {
        if self.used_names.insert(base.to_owned()) {
            return base.to_owned();
        }

        let mut counter = 2;
        loop {
            let name = format!("{base}{counter}");
            if self.used_names.insert(name.clone()) {
                return name;
            }
            counter += 1;
        }
    }
}
