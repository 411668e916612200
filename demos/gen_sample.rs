use anyhow::Result;

fn main() -> Result<()> {
    let mut book = umya_spreadsheet::new_file();

    let sheet = book.get_active_sheet_mut();

    sheet.get_cell_mut("A1").set_value("Name");
    sheet.get_cell_mut("B1").set_value("Dept");
    sheet.get_cell_mut("C1").set_value("Price");

    sheet.get_cell_mut("A2").set_value("Widget");
    sheet.get_cell_mut("B2").set_value("Hardware");
    sheet.get_cell_mut("C2").set_value_number(10);

    sheet.get_cell_mut("A3").set_value("Gadget");
    sheet.get_cell_mut("B3").set_value("Hardware");
    sheet.get_cell_mut("C3").set_value_number(7);

    umya_spreadsheet::writer::xlsx::write(&book, "sample.xlsx")?;
    println!("Wrote sample.xlsx");
    Ok(())
}
