use indoc::indoc;

pub(crate) const SEARCH_LAS_VEGAS: &str = indoc! {r#"
  {
    "feed": {
      "page": 1,
      "count": 3,
      "totalResults": 3,
      "movie": [
        {
          "code": 18457,
          "originalTitle": "Fear and Loathing in Las Vegas",
          "title": "Las Vegas parano",
          "productionYear": 1998,
          "release": { "releaseDate": "1998-08-19" },
          "castMember": [{ "person": "Terry Gilliam", "activity": { "code": 8002 } }],
          "poster": { "href": "http://images.allocine.fr/medias/04/21/07/042107_af.jpg" },
          "statistics": { "userRating": 4 },
          "link": [{ "rel": "aco:more", "href": "http://www.allocine.fr/film/fichefilm_gen_cfilm=18457.html" }]
        },
        {
          "code": 10567,
          "originalTitle": "Honeymoon in Vegas",
          "title": "Lune de miel à Las Vegas",
          "productionYear": 1992,
          "statistics": { "userRating": 2 }
        },
        {
          "code": 149620,
          "originalTitle": "The Virgin of Las Vegas",
          "productionYear": 2009
        }
      ]
    }
  }
"#};

pub(crate) const SEARCH_LAS_VEGAS_PARANO: &str = indoc! {r#"
  {
    "feed": {
      "movie": [
        {
          "code": 18458,
          "originalTitle": "Las Vegas Parano: The Documentary",
          "productionYear": 2003
        },
        {
          "code": 18457,
          "originalTitle": "Fear and Loathing in Las Vegas",
          "title": "Las Vegas parano",
          "productionYear": 1998,
          "statistics": { "userRating": 4 }
        },
        {
          "code": 99999,
          "originalTitle": "LAS VEGAS PARANO",
          "productionYear": 2020
        }
      ]
    }
  }
"#};

pub(crate) const SEARCH_NO_RESULTS: &str = indoc! {r#"
  {
    "feed": {
      "page": 1,
      "count": 0,
      "totalResults": 0
    }
  }
"#};

pub(crate) const DETAIL_LAS_VEGAS_PARANO: &str = indoc! {r#"
  {
    "movie": {
      "code": 18457,
      "originalTitle": "Fear and Loathing in Las Vegas",
      "title": "Las Vegas parano",
      "productionYear": 1998,
      "genre": [
        { "code": 13002, "$": "Comédie dramatique" },
        { "code": 13001, "$": "Aventure" }
      ],
      "statistics": { "userRating": 4 },
      "synopsis": "A travers l'épopée à la fois comique et horrible vers Las Vegas du journaliste Raoul Duke."
    }
  }
"#};
