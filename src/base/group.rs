use crate::base;

/// Groups `table` by `keys` and reduces `measures` per group, producing one
/// row per distinct non-null key tuple in ascending order. Without keys the
/// whole table forms a single group.
pub fn group_by<S>(
    table: &base::Table,
    keys: &[S],
    measures: &[base::Measure],
) -> Result<base::Table, base::table::Error>
where
    S: AsRef<str>,
{
    let key_idx = keys
        .iter()
        .map(|k| table.index_of(k.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let bound = base::measure::Bound::new(table, measures)?;
    let measure_columns = base::measure::output_columns(keys, measures)?;

    let mut agg = base::Aggregate::<Vec<&base::Value>, base::Accumulators>::default();
    if key_idx.is_empty() {
        agg.add(Vec::new(), bound.fold(table)?);
    } else {
        for (i, row) in table.rows().enumerate() {
            let key = key_idx.iter().map(|&k| &row[k]).collect::<Vec<_>>();
            if key.iter().any(|v| v.is_null()) {
                continue;
            }
            agg.add(key, bound.accumulate(row, i)?);
        }
    }

    let mut columns = keys
        .iter()
        .map(|k| k.as_ref().to_string())
        .collect::<Vec<_>>();
    columns.extend(measure_columns);
    let mut out = base::Table::new(columns);
    for (key, accs) in agg {
        let mut row = key.into_iter().cloned().collect::<Vec<_>>();
        row.extend(accs.finish(measures).into_iter().map(|x| match x {
            Some(x) => base::Value::from_f64(x),
            None => base::Value::Null,
        }));
        out.push(row);
    }
    tracing::debug!(groups = out.len(), "grouped rows");
    Ok(out)
}
