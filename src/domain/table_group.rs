use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableGroup {
    Acct,
    Core,
}

impl TableGroup {
    pub const ALL: [TableGroup; 2] = [TableGroup::Acct, TableGroup::Core];

    const ACCT_PREFIXES: [&'static str; 2] = ["kfa", "kgl"];

    /// Accounting tables are recognised by prefix only; everything else is core.
    pub fn classify(table_name: &str) -> Self {
        if Self::ACCT_PREFIXES
            .iter()
            .any(|prefix| table_name.starts_with(prefix))
        {
            TableGroup::Acct
        } else {
            TableGroup::Core
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            TableGroup::Acct => "acct",
            TableGroup::Core => "core",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TableGroup::Acct => "Accounting",
            TableGroup::Core => "Core",
        }
    }

    pub fn dump_file_name(self) -> &'static str {
        match self {
            TableGroup::Acct => "acct_db.sql",
            TableGroup::Core => "core_db.sql",
        }
    }

    pub fn script_file_name(self) -> &'static str {
        match self {
            TableGroup::Acct => "acct.sql",
            TableGroup::Core => "core.sql",
        }
    }
}

impl fmt::Display for TableGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Schema names of the two groups in one target environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaNames {
    pub acct: &'static str,
    pub core: &'static str,
}

impl SchemaNames {
    /// Used by the DDL extractor for header prefixes and synthesized DROPs.
    pub const UAT_SUNCBS: SchemaNames = SchemaNames {
        acct: "uat_suncbs_acctdb",
        core: "uat_suncbs_coredb",
    };

    /// Used by the export definition generator in file headers.
    pub const SIT_SUNCBS: SchemaNames = SchemaNames {
        acct: "sit_suncbs_acctdb",
        core: "sit_suncbs_coredb",
    };

    pub fn for_group(&self, group: TableGroup) -> &'static str {
        match group {
            TableGroup::Acct => self.acct,
            TableGroup::Core => self.core,
        }
    }

    pub fn all(&self) -> [&'static str; 2] {
        TableGroup::ALL.map(|group| self.for_group(group))
    }
}
