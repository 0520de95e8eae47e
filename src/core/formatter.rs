use crate::domain::model::{AirfoilName, CoordinateTable, Layout};
use crate::utils::error::{AirfoilError, Result};

/// Renders a coordinate table as text.
///
/// `Standard` starts with the airfoil header followed by `  x  y` rows;
/// `SolidWorks` has no header and appends a zero Z column. Every value has
/// six decimals and rows keep the table order.
pub fn format(table: &CoordinateTable, name: &AirfoilName, layout: Layout) -> Result<String> {
    if table.is_empty() {
        return Err(AirfoilError::EmptyTable);
    }

    let mut lines = Vec::with_capacity(table.len() + 1);
    match layout {
        Layout::Standard => {
            lines.push(name.header());
            lines.extend(table.iter().map(|p| format!("  {:.6}  {:.6}", p.x, p.y)));
        }
        Layout::SolidWorks => {
            lines.extend(table.iter().map(|p| format!("{:.6} {:.6} 0.000000", p.x, p.y)));
        }
    }

    Ok(lines.join("\n"))
}
