use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Shallow field-wise merge, the contract behind
/// [`KeyedCollection::update`](crate::KeyedCollection::update).
///
/// `Patch` is a partial view of the implementing type, typically a struct
/// with one `Option` per mergeable field. `merge` overwrites exactly the
/// fields the patch carries and leaves the rest untouched.
pub trait Merge {
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

/// Shallow-merges the fields of a JSON object onto `item` in place.
///
/// Mirrors a spread-style record merge for any serde-representable type,
/// for callers that don't want to hand-write a patch struct. Fields in
/// `patch` replace same-named fields wholesale; nothing recurses. Fails
/// only when the merged object no longer deserializes into `T`, in which
/// case `item` is left unchanged.
pub fn merge_json<T>(item: &mut T, patch: Value) -> serde_json::Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let mut base = serde_json::to_value(&*item)?;

    if let (Value::Object(fields), Value::Object(updates)) = (&mut base, patch) {
        for (name, value) in updates {
            fields.insert(name, value);
        }
    }

    *item = serde_json::from_value(base)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::{merge_json, Merge};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Droid {
        designation: String,
        memory_wipes: u32,
    }

    struct DroidPatch {
        designation: Option<String>,
        memory_wipes: Option<u32>,
    }

    impl Merge for Droid {
        type Patch = DroidPatch;

        fn merge(&mut self, patch: DroidPatch) {
            if let Some(designation) = patch.designation {
                self.designation = designation;
            }
            if let Some(memory_wipes) = patch.memory_wipes {
                self.memory_wipes = memory_wipes;
            }
        }
    }

    #[test]
    fn merge_overwrites_only_patched_fields() {
        let mut droid = Droid {
            designation: "R2-D2".into(),
            memory_wipes: 0,
        };

        droid.merge(DroidPatch {
            designation: None,
            memory_wipes: Some(3),
        });

        assert_eq!(droid.designation, "R2-D2");
        assert_eq!(droid.memory_wipes, 3);
    }

    #[test]
    fn merge_json_is_shallow() {
        let mut droid = Droid {
            designation: "C-3PO".into(),
            memory_wipes: 1,
        };

        merge_json(&mut droid, json!({ "memory_wipes": 2 })).unwrap();

        assert_eq!(
            droid,
            Droid {
                designation: "C-3PO".into(),
                memory_wipes: 2,
            }
        );
    }

    #[test]
    fn merge_json_rejects_incompatible_patches() {
        let mut droid = Droid {
            designation: "BB-8".into(),
            memory_wipes: 0,
        };

        let result = merge_json(&mut droid, json!({ "memory_wipes": "lots" }));

        assert!(result.is_err());
        assert_eq!(droid.memory_wipes, 0);
    }
}
