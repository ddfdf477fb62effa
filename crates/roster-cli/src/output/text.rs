use roster_core::{Field, Match, Record};

use crate::ui::format::or_dash;
use crate::ui::{
    blank_line, format_datetime, header, hint, kv, print, short_id, table, truncate, Column,
    UiContext,
};

const LIST_COLUMNS: [Column; 10] = [
    Column::new("#"),
    Column::new("ID"),
    Column::new("Name"),
    Column::new("Email"),
    Column::new("Phone"),
    Column::new("PAN"),
    Column::new("Address"),
    Column::new("City"),
    Column::new("State"),
    Column::new("Postal Code"),
];

fn field_value(record: &Record, field: Field) -> &str {
    let p = &record.profile;
    match field {
        Field::Name => &p.name,
        Field::Email => &p.email,
        Field::Number => &p.number,
        Field::Pan => &p.pan,
        Field::Address1 => &p.address1,
        Field::Address2 => &p.address2,
        Field::City => &p.city,
        Field::State => &p.state,
        Field::PostalCode => &p.postal_code,
    }
}

fn address(record: &Record) -> String {
    let p = &record.profile;
    if p.address2.trim().is_empty() {
        p.address1.clone()
    } else {
        format!("{}, {}", p.address1, p.address2)
    }
}

/// Print every field of one profile.
pub fn print_record(ctx: &UiContext, record: &Record, index: usize) {
    if ctx.mode.is_pretty() {
        print(ctx, &header(ctx, "show", Some(&short_id(&record.id))));
        blank_line(ctx);
    }

    print(ctx, &kv(ctx, "ID", &record.id.to_string()));
    print(ctx, &kv(ctx, "Index", &index.to_string()));
    for field in Field::ALL {
        print(ctx, &kv(ctx, field.label(), or_dash(field_value(record, field))));
    }
    if let Some(created) = record.created_at.as_ref() {
        print(
            ctx,
            &kv(ctx, "Created", &format_datetime(created, ctx.mode.is_pretty())),
        );
    }
}

/// Print the listing view.
pub fn print_record_list(
    ctx: &UiContext,
    matches: &[Match<'_>],
    search: Option<&str>,
    total: usize,
) {
    if ctx.mode.is_pretty() {
        let context = match search {
            Some(s) if !s.is_empty() => format!("\"{}\", {} of {}", s, matches.len(), total),
            _ => format!("{} total", total),
        };
        print(ctx, &header(ctx, "list", Some(&context)));
        blank_line(ctx);

        if matches.is_empty() {
            print(ctx, "No profiles found.");
            blank_line(ctx);
            let next = if total == 0 {
                "roster add"
            } else {
                "roster list (without --search)"
            };
            print(ctx, &hint(ctx, next));
            return;
        }
    }

    let pretty = ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = matches
        .iter()
        .map(|m| {
            let record = m.record;
            let (id, position) = if pretty {
                (short_id(&record.id), (m.index + 1).to_string())
            } else {
                (record.id.to_string(), m.index.to_string())
            };
            let (name, email, address) = if pretty {
                (
                    truncate(record.name(), 24),
                    truncate(&record.profile.email, 28),
                    truncate(&address(record), 32),
                )
            } else {
                (
                    record.name().to_string(),
                    record.profile.email.clone(),
                    address(record),
                )
            };
            vec![
                position,
                id,
                name,
                email,
                record.profile.number.clone(),
                record.profile.pan.clone(),
                address,
                record.profile.city.clone(),
                record.profile.state.clone(),
                record.profile.postal_code.clone(),
            ]
        })
        .collect();

    if !rows.is_empty() {
        print(ctx, &table(ctx, &LIST_COLUMNS, &rows));
    }

    if pretty {
        blank_line(ctx);
        print(ctx, &hint(ctx, "roster show <id>  \u{00B7}  roster edit <id>"));
    }
}
