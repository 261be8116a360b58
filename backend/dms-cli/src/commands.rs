use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create one storage unit
    CreateUnit {
        #[arg(long)]
        department_id: i64,

        #[arg(long)]
        sub_department_id: Option<i64>,

        /// Omit to create a root unit
        #[arg(long)]
        parent_id: Option<i64>,

        /// room, cabinet, layer, box or folder
        #[arg(long = "type")]
        unit_type: String,

        #[arg(long)]
        name: String,

        /// Required for folders
        #[arg(long)]
        capacity: Option<i64>,
    },

    /// Change a folder's capacity
    UpdateCapacity { location_id: i64, capacity: i64 },

    /// Delete a unit that has no children and no files
    DeleteUnit { location_id: i64 },

    /// Create a chain of units in one step; omitted ranks are skipped
    AddHierarchy {
        #[arg(long)]
        department_id: i64,

        #[arg(long)]
        sub_department_id: Option<i64>,

        #[arg(long)]
        room: Option<String>,

        #[arg(long)]
        cabinet: Option<String>,

        #[arg(long)]
        layer: Option<String>,

        #[arg(long = "box")]
        box_name: Option<String>,

        #[arg(long)]
        folder: Option<String>,

        /// Folder capacity (configured default when omitted)
        #[arg(long)]
        capacity: Option<i64>,
    },

    /// Unlink a file from its storage location
    DetachFile { file_id: i64 },

    /// Show the location tree of a department or sub-department
    Tree {
        #[arg(long)]
        department_id: i64,

        #[arg(long)]
        sub_department_id: Option<i64>,
    },

    /// List files filed at a location
    Files { location_id: i64 },

    /// Show recent transaction log entries
    Log {
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
}
