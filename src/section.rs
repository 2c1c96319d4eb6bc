use std::collections::HashMap;

use crate::site::Site;

/// A column of the page: every site sharing one `section` value.
#[derive(Debug)]
pub struct Section<'a> {
    pub name: &'a str,
    pub sites: Vec<&'a Site>,
}

/// Groups sites by section. Sections come out in the order they are first
/// seen, and sites keep their input order within a section.
pub fn group(sites: &[Site]) -> Vec<Section<'_>> {
    let mut sections: Vec<Section> = vec![];
    let mut index = HashMap::new();

    for site in sites {
        let i = *index.entry(site.section.as_str()).or_insert_with(|| {
            sections.push(Section {
                name: &site.section,
                sites: vec![],
            });
            sections.len() - 1
        });

        sections[i].sites.push(site);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(section: &str, name: &str) -> Site {
        Site {
            section: section.to_string(),
            images: name.to_lowercase(),
            name: name.to_string(),
            url: format!("{name}.com"),
            destination: format!("http://{name}.com"),
            redir: None,
            error: None,
        }
    }

    fn names<'a>(section: &Section<'a>) -> Vec<&'a str> {
        section.sites.iter().map(|&s| s.name.as_str()).collect()
    }

    #[test]
    fn sections_in_first_seen_order() {
        let sites = vec![
            site("sports", "A"),
            site("news", "B"),
            site("sports", "C"),
            site("autos", "D"),
            site("news", "E"),
        ];

        let sections = group(&sites);

        let order: Vec<_> = sections.iter().map(|s| s.name).collect();
        assert_eq!(order, ["sports", "news", "autos"]);
        assert_eq!(names(&sections[0]), ["A", "C"]);
        assert_eq!(names(&sections[1]), ["B", "E"]);
        assert_eq!(names(&sections[2]), ["D"]);
    }

    #[test]
    fn every_site_lands_in_exactly_one_section() {
        let sites: Vec<_> = (0..20)
            .map(|i| site(["a", "b", "c"][i % 3], &format!("S{i}")))
            .collect();

        let sections = group(&sites);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections.iter().map(|s| s.sites.len()).sum::<usize>(), 20);
        for section in &sections {
            assert!(section.sites.iter().all(|s| s.section == section.name));
        }
    }

    #[test]
    fn no_sites_no_sections() {
        assert!(group(&[]).is_empty());
    }
}
